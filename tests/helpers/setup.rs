use evently_api::Application;
use evently_infra::setup_context;
use evently_sdk::EventlySDK;

// Launch the application as a background task
pub async fn spawn_app() -> (EventlySDK, String) {
    let mut ctx = setup_context().await.expect("Failed to setup context");
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = EventlySDK::new(address.clone());
    (sdk, address)
}
