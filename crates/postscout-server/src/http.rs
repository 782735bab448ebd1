//! Shared HTTP client construction for outbound page and search fetches.
//!
//! Search engines and LinkedIn both rate-limit obvious bots, so the
//! client carries a rotating browser User-Agent and follows redirects.

use std::time::Duration;

use rand::seq::SliceRandom;
use reqwest::Client;

/// Realistic browser User-Agent strings, rotated per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Build a browser-like client with the given request timeout.
pub fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .cookie_store(true)
        .timeout(timeout)
        .user_agent(random_user_agent())
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .expect("Failed to build HTTP client")
}

/// Plain JSON API client, request-timeout bounded. Used for the Exa and
/// Together endpoints, which need no browser camouflage.
pub fn build_api_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to build HTTP client")
}

fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        .unwrap_or(USER_AGENTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_user_agent_is_from_rotation() {
        let ua = random_user_agent();
        assert!(USER_AGENTS.contains(&ua));
        assert!(ua.contains("Mozilla/5.0"));
    }

    #[tokio::test]
    async fn api_client_times_out_on_a_silent_server() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(60)).await;
            drop(socket);
        });

        let client = build_api_client(Duration::from_millis(100));
        let err = client
            .get(format!("http://{}", addr))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_timeout());
    }
}
