use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use std::path::{Path, PathBuf};

const BIND_ADDRESS: &str = "127.0.0.1:8000";

/// Client tree, relative to the workspace root. `public` holds the host page
/// and the catalog documents, `pkg` the wasm-pack output.
const CLIENT_DIR: &str = "./client";

/// Routes for a client tree rooted at `client_dir`. Nothing here looks inside
/// the catalog documents; they are handed out like any other file.
fn static_files(client_dir: &Path) -> impl FnOnce(&mut web::ServiceConfig) {
    let public = client_dir.join("public");
    let pkg = client_dir.join("pkg");
    move |cfg: &mut web::ServiceConfig| {
        cfg.service(Files::new("/pkg", pkg))
            .service(Files::new("/", public).index_file("index.html"));
    }
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let client_dir = PathBuf::from(CLIENT_DIR);
    if !client_dir.join("pkg").is_dir() {
        log::warn!(
            "{}/pkg is missing, build the client with wasm-pack first",
            CLIENT_DIR
        );
    }
    log::info!("serving {} on http://{}", client_dir.display(), BIND_ADDRESS);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(static_files(&client_dir))
    })
    .bind(BIND_ADDRESS)?
    .run()
    .await
}
