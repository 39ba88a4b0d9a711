use todolist_app::migrations::Migrator;
use todolist_app::routes;
use web::Application;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    Application::new()
        .routes(routes::register)
        .migrations::<Migrator>()
        .run()
        .await
}
