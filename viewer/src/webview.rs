//! HTTP endpoints serving the rendered network to the browser
//!
//! This module provides a warp-based HTTP server with endpoints for:
//! - Listing the loaded periods
//! - Fetching the scene or the ready-made Plotly figure for one period
//! - Serving the static viewer page

use crate::page::INDEX_HTML;
use space_lib::{figure, render, DatasetStore};
use std::sync::Arc;
use warp::Filter;

/// Error response structure for HTTP 4xx responses
#[derive(serde::Serialize)]
pub struct ErrorMessage {
    pub code: u16,
    pub message: String,
}

/// Setup all viewer HTTP endpoints and return a warp Filter
///
/// Endpoints provided:
/// - GET / - The viewer page (dropdown + Plotly graph)
/// - GET /periods - List the loaded periods
/// - GET /scene/<p> - Scene primitives for period p
/// - GET /figure/<p> - Plotly figure JSON for period p
pub fn setup_routes(
    store: Arc<DatasetStore>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let index = warp::get()
        .and(warp::path::end())
        .map(|| warp::reply::html(INDEX_HTML));

    // Endpoint: GET /periods - returns the periods the store was loaded with
    let periods_endpoint = {
        let store = store.clone();
        warp::get()
            .and(warp::path("periods"))
            .and(warp::path::end())
            .map(move || warp::reply::json(&store.periods()))
    };

    // Endpoint: GET /scene/<p> - scene primitives, 404 on an unknown or
    // unparsable period
    let scene_endpoint = {
        let store = store.clone();
        warp::get()
            .and(warp::path!("scene" / String))
            .and(warp::path::end())
            .map(move |segment: String| {
                let Ok(period) = segment.parse::<u8>() else {
                    let json = warp::reply::json(&ErrorMessage {
                        code: 404,
                        message: format!("unknown period {segment}"),
                    });
                    return warp::reply::with_status(json, warp::http::StatusCode::NOT_FOUND);
                };
                match render(&store, period) {
                    Ok(scene) => warp::reply::with_status(
                        warp::reply::json(&scene),
                        warp::http::StatusCode::OK,
                    ),
                    Err(err) => warp::reply::with_status(
                        warp::reply::json(&ErrorMessage {
                            code: 404,
                            message: err.to_string(),
                        }),
                        warp::http::StatusCode::NOT_FOUND,
                    ),
                }
            })
    };

    // Endpoint: GET /figure/<p> - the figure Plotly consumes directly
    let figure_endpoint = {
        let store = store.clone();
        warp::get()
            .and(warp::path!("figure" / String))
            .and(warp::path::end())
            .map(move |segment: String| {
                let Ok(period) = segment.parse::<u8>() else {
                    let json = warp::reply::json(&ErrorMessage {
                        code: 404,
                        message: format!("unknown period {segment}"),
                    });
                    return warp::reply::with_status(json, warp::http::StatusCode::NOT_FOUND);
                };
                match render(&store, period) {
                    Ok(scene) => warp::reply::with_status(
                        warp::reply::json(&figure::to_value(&scene)),
                        warp::http::StatusCode::OK,
                    ),
                    Err(err) => warp::reply::with_status(
                        warp::reply::json(&ErrorMessage {
                            code: 404,
                            message: err.to_string(),
                        }),
                        warp::http::StatusCode::NOT_FOUND,
                    ),
                }
            })
    };

    // CORS configuration so other frontends can pull the figure JSON
    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "OPTIONS"])
        .allow_headers(vec!["content-type"]);

    index
        .or(periods_endpoint)
        .or(scene_endpoint)
        .or(figure_endpoint)
        .with(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use space_lib::records::{EdgeRecord, MetricRow, NodePosition, ProductEntry};
    use std::collections::BTreeMap;

    fn store() -> Arc<DatasetStore> {
        let positions = vec![
            NodePosition {
                id: 101,
                x: 0.0,
                y: 0.0,
            },
            NodePosition {
                id: 202,
                x: 1.0,
                y: 1.0,
            },
        ];
        let edges = vec![EdgeRecord {
            source: 101,
            target: 202,
            strength: 0.9,
        }];
        let dictionary = vec![
            ProductEntry {
                id: 101,
                label: Some("Sheep".to_string()),
                section: Some(1),
            },
            ProductEntry {
                id: 202,
                label: Some("Coffee".to_string()),
                section: Some(2),
            },
        ];
        let mut metrics = BTreeMap::new();
        metrics.insert(
            0u8,
            vec![
                MetricRow {
                    id: 101,
                    prody: 10.0,
                },
                MetricRow {
                    id: 202,
                    prody: 20.0,
                },
            ],
        );
        Arc::new(DatasetStore::new(positions, edges, dictionary, metrics))
    }

    #[test]
    fn error_message_serialize() {
        let em = ErrorMessage {
            code: 404,
            message: "not found".to_string(),
        };

        let v = serde_json::to_value(&em).expect("serialize");
        assert_eq!(v["code"].as_i64().unwrap(), 404);
        assert_eq!(v["message"].as_str().unwrap(), "not found");
    }

    #[tokio::test]
    async fn periods_endpoint_lists_loaded_periods() {
        let routes = setup_routes(store());
        let resp = warp::test::request()
            .method("GET")
            .path("/periods")
            .reply(&routes)
            .await;
        assert_eq!(resp.status(), 200);
        let periods: Vec<u8> = serde_json::from_slice(resp.body()).expect("json");
        assert_eq!(periods, vec![0]);
    }

    #[tokio::test]
    async fn scene_endpoint_returns_the_rendered_scene() {
        let routes = setup_routes(store());
        let resp = warp::test::request()
            .method("GET")
            .path("/scene/0")
            .reply(&routes)
            .await;
        assert_eq!(resp.status(), 200);
        let scene: serde_json::Value = serde_json::from_slice(resp.body()).expect("json");
        assert_eq!(scene["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(scene["title"], "3D Network Visualization for Period 0");
    }

    #[tokio::test]
    async fn unknown_period_maps_to_404_with_an_error_body() {
        let routes = setup_routes(store());
        let resp = warp::test::request()
            .method("GET")
            .path("/scene/99")
            .reply(&routes)
            .await;
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = serde_json::from_slice(resp.body()).expect("json");
        assert_eq!(body["code"].as_i64().unwrap(), 404);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("unknown period 99"));
    }

    #[tokio::test]
    async fn out_of_range_period_gets_the_same_error_body() {
        let routes = setup_routes(store());
        let resp = warp::test::request()
            .method("GET")
            .path("/scene/300")
            .reply(&routes)
            .await;
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = serde_json::from_slice(resp.body()).expect("json");
        assert_eq!(body["code"].as_i64().unwrap(), 404);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("unknown period 300"));
    }

    #[tokio::test]
    async fn non_numeric_period_gets_the_same_error_body() {
        let routes = setup_routes(store());
        let resp = warp::test::request()
            .method("GET")
            .path("/figure/latest")
            .reply(&routes)
            .await;
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = serde_json::from_slice(resp.body()).expect("json");
        assert_eq!(body["code"].as_i64().unwrap(), 404);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("unknown period latest"));
    }

    #[tokio::test]
    async fn figure_endpoint_returns_plotly_traces() {
        let routes = setup_routes(store());
        let resp = warp::test::request()
            .method("GET")
            .path("/figure/0")
            .reply(&routes)
            .await;
        assert_eq!(resp.status(), 200);
        let fig: serde_json::Value = serde_json::from_slice(resp.body()).expect("json");
        assert_eq!(fig["data"].as_array().unwrap().len(), 2);
        assert_eq!(fig["data"][1]["mode"], "markers");
    }

    #[tokio::test]
    async fn index_serves_the_viewer_page() {
        let routes = setup_routes(store());
        let resp = warp::test::request()
            .method("GET")
            .path("/")
            .reply(&routes)
            .await;
        assert_eq!(resp.status(), 200);
        let body = String::from_utf8_lossy(resp.body());
        assert!(body.contains("Product-PRODY Space Network"));
    }
}
