use std::sync::Arc;

use idcard_core::{
    display::{empty_list_message, format_created_at, initials, status_label},
    model::RequestTab,
    IdCardCore,
};
use idcard_providers::{
    common_models::id_card_request::RequestId, http_client::imp::reqwest_client::ReqwestClient,
};

/// Usage: `dashboard-example <admin-id> [request-id-to-promote]`
///
/// The backend is taken from `IDCARD_API_URL`, falling back to the local one.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let admin_id = args.next().unwrap_or_default();
    let promote_id = args.next();

    let core = IdCardCore::from_env(
        Some("localhost"),
        Arc::new(ReqwestClient::new(reqwest::Client::new())),
    )?;

    if let Err(err) = core.auth_service.login(&admin_id).await {
        println!("Login failed: {err}");
        return Ok(());
    }

    let requests = &core.request_service;
    requests.initial_load().await;

    if let Some(id) = promote_id {
        match requests.promote(&RequestId::from(id)).await {
            Ok(outcome) => println!(
                "Promoted ({:?}){}",
                outcome.strategy,
                if outcome.degraded { ", view may be stale" } else { "" }
            ),
            Err(err) => println!("Promotion failed: {err}"),
        }
    }

    let counts = requests.counts().await;
    println!("Pending: {}  Printed: {}", counts.pending, counts.printed);

    for tab in [RequestTab::Pending, RequestTab::Printed] {
        requests.set_tab(tab).await;
        println!("\n== {tab} ==");

        let visible = requests.visible_requests().await;
        if visible.is_empty() {
            println!("{}", empty_list_message(tab));
        }

        for request in visible {
            println!(
                "[{}] {} {} ({}) {} {}-{} submitted {} | {}",
                request.id,
                initials(&request.name),
                request.name,
                request.register_number,
                request.department,
                request.year,
                request.section,
                format_created_at(request.created_at.as_deref()),
                status_label(request.status),
            );
        }
    }

    requests.close();
    Ok(())
}
