#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use slot_booking::api::{self, ApiState};
    use slot_booking::app::{shell, App};
    use slot_booking::data::schedule::DaySchedule;
    use slot_booking::data::upstream::BackendClient;
    use slot_booking::settings::Settings;

    env_logger::init();

    let settings = Settings::from_yaml("settings.yaml").expect("failed to load settings.yaml");
    let schedule =
        DaySchedule::from_settings(&settings).expect("invalid schedule in settings.yaml");
    let backend = BackendClient::new(&settings.backend_url);

    let conf = get_configuration(None).expect("failed to read leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .merge(api::router(ApiState { schedule, backend }));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind site address");
    log!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
