//! Endpoint Registry - the route table.
//!
//! This module provides:
//! - The list of every route the server answers
//! - Construction of the axum router bound to a server

use axum::Router;

use super::definitions::{
    DescriptorsEndpoint, Inchi2InchikeyEndpoint, McsEndpoint, Mol2InchiEndpoint,
    Molblock2InchiEndpoint, MurckoScaffoldEndpoint, PainsFiltersEndpoint, ReadyEndpoint,
};
use crate::core::ChemServer;
use crate::domains::toolkit::Toolkit;

/// Route metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Endpoint registry - the single source of truth for the route table.
pub struct EndpointRegistry;

impl EndpointRegistry {
    /// Get all routes.
    pub fn all() -> Vec<EndpointInfo> {
        vec![
            EndpointInfo {
                method: "GET",
                path: ReadyEndpoint::PATH,
                description: ReadyEndpoint::DESCRIPTION,
            },
            EndpointInfo {
                method: "POST",
                path: McsEndpoint::PATH,
                description: McsEndpoint::DESCRIPTION,
            },
            EndpointInfo {
                method: "POST",
                path: PainsFiltersEndpoint::PATH,
                description: PainsFiltersEndpoint::DESCRIPTION,
            },
            EndpointInfo {
                method: "POST",
                path: Molblock2InchiEndpoint::PATH,
                description: Molblock2InchiEndpoint::DESCRIPTION,
            },
            EndpointInfo {
                method: "POST",
                path: Mol2InchiEndpoint::PATH,
                description: Mol2InchiEndpoint::DESCRIPTION,
            },
            EndpointInfo {
                method: "POST",
                path: Inchi2InchikeyEndpoint::PATH,
                description: Inchi2InchikeyEndpoint::DESCRIPTION,
            },
            EndpointInfo {
                method: "POST",
                path: DescriptorsEndpoint::PATH,
                description: DescriptorsEndpoint::DESCRIPTION,
            },
            EndpointInfo {
                method: "POST",
                path: MurckoScaffoldEndpoint::PATH,
                description: MurckoScaffoldEndpoint::DESCRIPTION,
            },
        ]
    }

    /// Get all route paths.
    pub fn paths() -> Vec<&'static str> {
        Self::all().into_iter().map(|e| e.path).collect()
    }
}

/// Build the router with every registered endpoint, bound to `server`.
pub fn build_router<T: Toolkit>(server: ChemServer<T>) -> Router {
    Router::new()
        .route(ReadyEndpoint::PATH, ReadyEndpoint::create_route::<T>())
        .route(McsEndpoint::PATH, McsEndpoint::create_route::<T>())
        .route(PainsFiltersEndpoint::PATH, PainsFiltersEndpoint::create_route::<T>())
        .route(Molblock2InchiEndpoint::PATH, Molblock2InchiEndpoint::create_route::<T>())
        .route(Mol2InchiEndpoint::PATH, Mol2InchiEndpoint::create_route::<T>())
        .route(Inchi2InchikeyEndpoint::PATH, Inchi2InchikeyEndpoint::create_route::<T>())
        .route(DescriptorsEndpoint::PATH, DescriptorsEndpoint::create_route::<T>())
        .route(MurckoScaffoldEndpoint::PATH, MurckoScaffoldEndpoint::create_route::<T>())
        .with_state(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::core::Config;
    use crate::domains::toolkit::Descriptors;
    use crate::domains::toolkit::fake::FakeToolkit;

    const ETHANOL_BLOCK: &str = "ethanol
     RDKit          2D

  3  2  0  0  0  0  0  0  0  0999 V2000
    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    1.2990    0.7500    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    2.5981   -0.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  1  0
  2  3  1  0
M  END
";

    fn app() -> Router {
        let server = ChemServer::new(Config::default(), FakeToolkit::new()).unwrap();
        build_router(server)
    }

    async fn send(method: &str, path: &str, body: &str) -> (StatusCode, String) {
        send_to(app(), method, path, body).await
    }

    async fn send_to(app: Router, method: &str, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_registry_paths() {
        let paths = EndpointRegistry::paths();
        assert_eq!(paths.len(), 8);
        assert!(paths.contains(&"/ready"));
        assert!(paths.contains(&"/mcs"));
        assert!(paths.contains(&"/painsFilters"));
        assert!(paths.contains(&"/molblock2inchi"));
        assert!(paths.contains(&"/mol2inchi"));
        assert!(paths.contains(&"/inchi2inchikey"));
        assert!(paths.contains(&"/descriptors"));
        assert!(paths.contains(&"/murckoScaffold"));
    }

    #[tokio::test]
    async fn test_ready_get_and_post() {
        assert_eq!(send("GET", "/ready", "").await, (StatusCode::OK, "1".to_string()));
        assert_eq!(send("POST", "/ready", "ignored").await, (StatusCode::OK, "1".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_route_and_wrong_method() {
        let (status, _) = send("GET", "/nope", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send("GET", "/mol2inchi", "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_molblock2inchi_uses_block_directly() {
        let (status, body) = send("POST", "/molblock2inchi", ETHANOL_BLOCK).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "InChI=1S/ethanol");
    }

    #[tokio::test]
    async fn test_molblock2inchi_never_synthesizes_errors() {
        let (status, body) = send("POST", "/molblock2inchi", "not a block").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn test_mol2inchi_line_notation() {
        let (status, body) = send("POST", "/mol2inchi", "CCO").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "InChI=1S/CCO");
    }

    #[tokio::test]
    async fn test_mol2inchi_block() {
        let (status, body) = send("POST", "/mol2inchi", ETHANOL_BLOCK).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "InChI=1S/ethanol");
    }

    #[tokio::test]
    async fn test_mol2inchi_parse_failure() {
        let (status, body) = send("POST", "/mol2inchi", "not-a-molecule!!").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Can't create mol object from input");
    }

    #[tokio::test]
    async fn test_mol2inchi_empty_body() {
        let (status, body) = send("POST", "/mol2inchi", "").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Can't create mol object from input");
    }

    #[tokio::test]
    async fn test_toolkit_failure_is_500() {
        let (status, body) = send("POST", "/mol2inchi", "explode").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("toolkit blew up"));
    }

    #[tokio::test]
    async fn test_inchi2inchikey() {
        let (status, body) = send("POST", "/inchi2inchikey", "InChI=1S/CCO").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "CCO-UHFFFAOYSA-N");

        let (status, body) = send("POST", "/inchi2inchikey", "garbage").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn test_identifier_round_trip_is_stable() {
        let (_, inchi) = send("POST", "/mol2inchi", "CCO").await;
        let (_, first) = send("POST", "/inchi2inchikey", &inchi).await;
        let (_, second) = send("POST", "/inchi2inchikey", &inchi).await;
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_descriptors_has_exactly_eight_keys() {
        let (status, body) = send("POST", "/descriptors", "c1ccccc1").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let object = json.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, Descriptors::KEYS);
        assert_eq!(object["NumHeavyAtoms"].as_f64(), Some(6.0));
        assert_eq!(object["NumRings"].as_f64(), Some(1.0));
        assert!(object.values().all(|v| v.is_number()));
    }

    #[tokio::test]
    async fn test_descriptors_parse_failure() {
        let (status, body) = send("POST", "/descriptors", "C C").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Can't create mol object from input");
    }

    #[tokio::test]
    async fn test_pains_filters_first_match_only() {
        let (status, body) = send("POST", "/painsFilters", "CN=NC=NC=S").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"["azo_A(324)"]"#);
    }

    #[tokio::test]
    async fn test_pains_filters_no_match() {
        let (status, body) = send("POST", "/painsFilters", "CCO").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn test_pains_filters_parse_failure() {
        let (status, body) = send("POST", "/painsFilters", "not-a-molecule!!").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Cannot create molecule from input");
    }

    #[tokio::test]
    async fn test_mcs() {
        let (status, body) = send("POST", "/mcs", "CCO\nCCN\nCCC").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "CC");
    }

    #[tokio::test]
    async fn test_mcs_skips_invalid_lines() {
        let (status, body) = send("POST", "/mcs", "CCO\nnot valid!!\nCCN\n").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "CC");
    }

    #[tokio::test]
    async fn test_mcs_empty_body() {
        let (status, body) = send("POST", "/mcs", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn test_mcs_does_not_split_on_spaces() {
        // "CCO CCN" is one (invalid) line, leaving a single molecule.
        let (status, body) = send("POST", "/mcs", "CCO CCN\nCCC").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn test_murcko_scaffold() {
        let (status, body) = send("POST", "/murckoScaffold", "Cc1ccccc1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "c1ccccc1");

        let (status, body) = send("POST", "/murckoScaffold", "").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Can't create mol object from input");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_requests_are_independent() {
        let app = app();
        let inputs = ["CCO", "not-a-molecule!!", "CCN", "C C", "c1ccccc1", "bad!!", "CCCl"];
        let handles: Vec<_> = inputs
            .iter()
            .map(|&input| tokio::spawn(send_to(app.clone(), "POST", "/mol2inchi", input)))
            .collect();

        for (input, handle) in inputs.iter().zip(handles) {
            let (status, body) = handle.await.unwrap();
            if input.contains(['!', ' ']) {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "Can't create mol object from input");
            } else {
                assert_eq!(status, StatusCode::OK);
                assert_eq!(body, format!("InChI=1S/{}", input));
            }
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_requests_share_one_catalog() {
        let app = app();
        let mut handles = Vec::new();
        for round in 0..8 {
            let input = if round % 2 == 0 { "CN=NC" } else { "CCO" };
            handles.push((
                input,
                tokio::spawn(send_to(app.clone(), "POST", "/painsFilters", input)),
            ));
        }

        for (input, handle) in handles {
            let (status, body) = handle.await.unwrap();
            assert_eq!(status, StatusCode::OK);
            let expected = if input == "CCO" { "[]" } else { r#"["azo_A(324)"]"# };
            assert_eq!(body, expected);
        }
    }
}
