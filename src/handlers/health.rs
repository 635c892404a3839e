/// `GET /health`. Makes no outbound calls.
pub async fn handle_health() -> &'static str {
    "ok"
}
