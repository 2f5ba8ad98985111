//! Shared utilities for integration tests.

use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::oneshot;

use office_hours::config::SiteConfig;
use office_hours::gate::FixedClock;
use office_hours::http::HttpServer;

pub const INDEX_HTML: &str = "<html><body><h1>Welcome</h1></body></html>";
pub const SERVICES_HTML: &str = "<html><body><h1>Our Services</h1></body></html>";
pub const CONTACT_HTML: &str = "<html><body><h1>Contact Us</h1></body></html>";
pub const STYLE_CSS: &str = "body { font-family: sans-serif; }";

/// Local time on a day in the first week of 2024 (1 = Monday ... 7 = Sunday).
pub fn january_2024(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Write a views/ and public/ tree and point a config at it.
pub fn site_fixture() -> (TempDir, SiteConfig) {
    let dir = TempDir::new().unwrap();
    let views = dir.path().join("views");
    let public = dir.path().join("public");
    fs::create_dir_all(&views).unwrap();
    fs::create_dir_all(&public).unwrap();
    fs::write(views.join("index.html"), INDEX_HTML).unwrap();
    fs::write(views.join("services.html"), SERVICES_HTML).unwrap();
    fs::write(views.join("contact.html"), CONTACT_HTML).unwrap();
    fs::write(public.join("style.css"), STYLE_CSS).unwrap();

    let mut config = SiteConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.site.views_dir = views;
    config.site.public_dir = public;
    (dir, config)
}

/// A server running on an ephemeral port with a pinned clock.
pub struct RunningSite {
    pub addr: SocketAddr,
    stop: oneshot::Sender<()>,
    _dir: TempDir,
}

impl RunningSite {
    /// Ask the server to shut down gracefully.
    pub fn stop(self) {
        let _ = self.stop.send(());
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

pub async fn start_site(at: NaiveDateTime) -> RunningSite {
    let (dir, config) = site_fixture();
    start_site_with(dir, config, at).await
}

pub async fn start_site_with(dir: TempDir, config: SiteConfig, at: NaiveDateTime) -> RunningSite {
    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let (stop, stopped) = oneshot::channel::<()>();
    let server = HttpServer::new(config, Arc::new(FixedClock(at)));

    tokio::spawn(async move {
        let _ = server
            .run(listener, async move {
                let _ = stopped.await;
            })
            .await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    RunningSite {
        addr,
        stop,
        _dir: dir,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
