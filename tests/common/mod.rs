use serde_json::{json, Value};
use tokio::net::TcpListener;
use train_booking::application::{self, ApplicationEnv};

///
/// Starts application on an ephemeral port.
///
/// ### Returns
/// Base url of the started application
///
pub async fn spawn_application(seats_per_section: u32) -> String {
    spawn_application_with_content_len(seats_per_section, 16 * 1024).await
}

pub async fn spawn_application_with_content_len(
    seats_per_section: u32,
    max_http_content_len: usize,
) -> String {
    let env = ApplicationEnv {
        log_directory: String::new(),
        log_filename: String::new(),
        bind_address: "127.0.0.1:0".parse().unwrap(),
        seats_per_section,
        max_http_content_len,
    };

    let application_state = application::create_state(&env).unwrap();
    let application_middleware = application::create_middleware(&env);
    let app = application::create_application(application_state, application_middleware);

    let listener = TcpListener::bind(env.bind_address).await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{address}")
}

pub fn purchase_body(from: &str, to: &str, email: &str) -> Value {
    json!({
        "from": from,
        "to": to,
        "user": {
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": email,
        }
    })
}
