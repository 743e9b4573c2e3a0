#[tokio::main]
async fn main() {
    quest_log_be::start_server().await;
}
