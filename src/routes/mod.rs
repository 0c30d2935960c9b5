use actix_web::web;

pub mod backend_health;
pub mod leagues;
pub mod matches;
pub mod registration;
pub mod teams;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health);

    // League routes; team paths come before the `{league_id}` catch-all
    cfg.service(
        web::scope("/league")
            .service(leagues::create_league)
            .service(teams::register_team)
            .service(teams::get_all_teams)
            .service(teams::get_team)
            .service(leagues::get_all_leagues)
            .service(leagues::get_league)
            .service(leagues::delete_league),
    );

    // Match reconciliation routes
    cfg.service(
        web::scope("/matches")
            .service(matches::create_match)
            .service(matches::list_matches)
            .service(matches::report_result)
            .service(matches::resolve_conflict)
            .service(matches::get_match)
            .service(matches::delete_match),
    );
}
