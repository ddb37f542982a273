#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use shopsaas_web::app::{App, shell};
    use tower_http::services::ServeDir;

    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("leptos configuration");
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);
    let site_root = std::path::PathBuf::from(leptos_options.site_root.as_ref());

    // SSR routes plus the Leptos static assets (WASM, CSS, JS) under /pkg.
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options);

    let app = Router::new()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")));

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "shopsaas-web listening");
    axum::serve(listener, app).await.expect("server failed");
}

/// The binary only hosts the SSR build; hydrate builds ship the cdylib.
#[cfg(not(feature = "ssr"))]
fn main() {}
