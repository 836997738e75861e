use crate::api::ApiError;
use crate::model::*;
use log::debug;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// JSON client for the fleet backend. Every path is relative to `base_url`.
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<HttpClient, ApiError> {
        let parsed =
            Url::parse(base_url).map_err(|_| ApiError::InvalidUrl(base_url.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ApiError::Transport {
                url: base_url.to_string(),
                source,
            })?;
        Ok(HttpClient {
            client,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Vec<u8>, ApiError> {
        let transport = |source| ApiError::Transport {
            url: url.to_string(),
            source,
        };
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }
        let body = response.bytes().await.map_err(transport)?;
        debug!("{} returned {} bytes", url, body.len());
        Ok(body.to_vec())
    }

    async fn get<T>(&self, segments: &[&str]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(segments);
        let body = self.send(self.client.get(url.clone()), &url).await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn send_json<B>(&self, method: Method, segments: &[&str], body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments);
        let request = self.client.request(method, url.clone()).json(body);
        self.send(request, &url).await?;
        Ok(())
    }

    pub async fn latest_telemetry(&self) -> Result<Vec<Snapshot>, ApiError> {
        self.get(&["telemetry", "latest"]).await
    }

    pub async fn vehicle_telemetry(&self, vehicle_id: &str) -> Result<Vec<Snapshot>, ApiError> {
        self.get(&["telemetry", vehicle_id]).await
    }

    pub async fn vehicle_path(&self, vehicle_id: &str) -> Result<Vec<LatLon>, ApiError> {
        let response: PathResponse = self.get(&["vehicle-path", vehicle_id]).await?;
        Ok(response.path)
    }

    pub async fn active_alerts(&self) -> Result<Vec<Alert>, ApiError> {
        self.get(&["diagnostics", "alerts", "active"]).await
    }

    pub async fn active_alert_count(&self) -> Result<u64, ApiError> {
        let response: AlertCount = self.get(&["diagnostics", "active", "count"]).await?;
        Ok(response.count)
    }

    pub async fn alert(&self, alert_id: &str) -> Result<Alert, ApiError> {
        self.get(&["diagnostics", alert_id]).await
    }

    pub async fn resolve_alert(
        &self,
        alert_id: &str,
        resolution: &Resolution,
    ) -> Result<(), ApiError> {
        self.send_json(
            Method::PATCH,
            &["diagnostics", alert_id, "resolve"],
            resolution,
        )
        .await
    }

    pub async fn run_diagnostics(&self) -> Result<DiagnosticsRun, ApiError> {
        self.get(&["diagnostics", "run"]).await
    }

    pub async fn vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        self.get(&["vehicle"]).await
    }

    pub async fn vehicle(&self, vehicle_id: &str) -> Result<Vehicle, ApiError> {
        self.get(&["vehicle", "single", vehicle_id]).await
    }

    pub async fn update_vehicle_status(
        &self,
        vehicle_id: &str,
        status: VehicleStatus,
    ) -> Result<(), ApiError> {
        self.send_json(
            Method::PATCH,
            &["vehicle", vehicle_id, "status"],
            &StatusUpdate { status },
        )
        .await
    }

    pub async fn delete_vehicle(&self, vehicle_id: &str) -> Result<(), ApiError> {
        let url = self.url(&["vehicle", vehicle_id]);
        self.send(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }

    pub async fn maintenance_records(
        &self,
        vehicle_id: &str,
    ) -> Result<Vec<MaintenanceRecord>, ApiError> {
        self.get(&["maintenance", vehicle_id]).await
    }

    pub async fn add_maintenance_record(
        &self,
        vehicle_id: &str,
        record: &NewMaintenanceRecord,
    ) -> Result<(), ApiError> {
        self.send_json(Method::POST, &["maintenance", vehicle_id, "add"], record)
            .await
    }

    pub async fn top_risk(&self) -> Result<Vec<RiskAssessment>, ApiError> {
        self.get(&["strategy", "top-risk"]).await
    }

    pub async fn latest_strategy(
        &self,
        vehicle_id: &str,
    ) -> Result<StrategyRecommendation, ApiError> {
        self.get(&["strategy", "latest", vehicle_id]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::api::test_server::{read_request, respond};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves one canned response and returns the raw request it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            respond(&mut socket, status, body).await;
            request
        });
        (base_url, handle)
    }

    fn client(base_url: &str) -> HttpClient {
        HttpClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn latest_telemetry() {
        // Given
        let (base_url, server) = serve_once(
            "200 OK",
            r#"[{"vehicleId": "V-1", "vehicle": {"status": "active"}}]"#,
        )
        .await;

        // When
        let snapshots = client(&base_url).latest_telemetry().await.unwrap();

        // Then
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].vehicle_id.as_deref(), Some("V-1"));
        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/telemetry/latest HTTP/1.1"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        // Given
        let (base_url, server) = serve_once("500 Internal Server Error", "{}").await;

        // When
        let result = client(&base_url).latest_telemetry().await;

        // Then
        match result {
            Err(ApiError::Status { status, .. }) => assert_eq!(status.as_u16(), 500),
            other => panic!("Expected status error, got {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn body_of_wrong_shape_is_a_decode_error() {
        // Given
        let (base_url, server) = serve_once("200 OK", r#"{"error": "nope"}"#).await;

        // When
        let result = client(&base_url).latest_telemetry().await;

        // Then
        assert!(matches!(result, Err(ApiError::Decode { .. })));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn path_without_path_array_is_a_decode_error() {
        // Given
        let (base_url, server) = serve_once("200 OK", r#"{"vehicleId": "V-1"}"#).await;

        // When
        let result = client(&base_url).vehicle_path("V-1").await;

        // Then
        assert!(matches!(result, Err(ApiError::Decode { .. })));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn vehicle_id_is_escaped_in_path() {
        // Given
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"path": [{"latitude": 13.0, "longitude": 80.0}]}"#,
        )
        .await;

        // When
        let path = client(&base_url).vehicle_path("V 1/2").await.unwrap();

        // Then
        assert_eq!(path, vec![LatLon::new(13.0, 80.0)]);
        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/vehicle-path/V%201%2F2 HTTP/1.1"));
    }

    #[tokio::test]
    async fn resolve_alert_patches_resolution() {
        // Given
        let (base_url, server) = serve_once("200 OK", "{}").await;
        let resolution = Resolution::new("Ravi", "Replaced sensor").unwrap();

        // When
        client(&base_url)
            .resolve_alert("a1", &resolution)
            .await
            .unwrap();

        // Then
        let request = server.await.unwrap();
        assert!(request.starts_with("PATCH /api/diagnostics/a1/resolve HTTP/1.1"));
        assert!(request.ends_with(r#"{"resolvedBy":"Ravi","resolutionNote":"Replaced sensor"}"#));
    }

    #[tokio::test]
    async fn alert_count() {
        let (base_url, server) = serve_once("200 OK", r#"{"count": 4}"#).await;

        assert_eq!(client(&base_url).active_alert_count().await.unwrap(), 4);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        // Given
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api", listener.local_addr().unwrap());
        drop(listener);

        // When
        let result = client(&base_url).active_alerts().await;

        // Then
        assert!(matches!(result, Err(ApiError::Transport { .. })));
    }

    #[test]
    fn base_url_must_be_absolute() {
        assert!(matches!(
            HttpClient::new("localhost:3000/api", Duration::from_secs(1)),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpClient::new("not a url", Duration::from_secs(1)),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let client = client("http://localhost:3000/api/");

        assert_eq!(
            client.url(&["telemetry", "latest"]).as_str(),
            "http://localhost:3000/api/telemetry/latest"
        );
    }
}
