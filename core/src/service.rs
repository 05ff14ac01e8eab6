//! End-to-end product operations: build, execute, parse.

use tracing::debug;

use crate::client::ProductClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{CreateProduct, Product, ProductId, UpdateProduct};

/// Runs each catalog operation as exactly one HTTP request.
///
/// No retries, caching or timeouts: a call either completes or fails once.
#[derive(Debug, Clone)]
pub struct ProductService<T> {
    client: ProductClient,
    transport: T,
}

impl ProductService<UreqTransport> {
    /// Service over a fresh blocking `ureq` transport.
    pub fn connect(base_url: &str) -> Self {
        Self::new(ProductClient::new(base_url), UreqTransport::new())
    }
}

impl<T: Transport> ProductService<T> {
    pub fn new(client: ProductClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    pub fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.send(self.client.build_list_products())?;
        self.client.parse_list_products(response)
    }

    pub fn create_product(&self, input: &CreateProduct) -> Result<Product, ApiError> {
        let response = self.send(self.client.build_create_product(input)?)?;
        self.client.parse_create_product(response)
    }

    pub fn get_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let response = self.send(self.client.build_get_product(id)?)?;
        self.client.parse_get_product(response)
    }

    pub fn update_product(
        &self,
        id: &ProductId,
        input: &UpdateProduct,
    ) -> Result<Product, ApiError> {
        let response = self.send(self.client.build_update_product(id, input)?)?;
        self.client.parse_update_product(response)
    }

    pub fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_product(id)?)?;
        self.client.parse_delete_product(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        debug!(%method, %path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(%method, %path, status = response.status, "received response");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::http::HttpMethod;

    /// Replays canned responses and records every request it was given.
    #[derive(Default)]
    struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn reply(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }));
            self
        }

        fn fail(self, message: &str) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Err(ApiError::Transport(message.to_string())));
            self
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }
    }

    impl Transport for ScriptedTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("no scripted response left")
        }
    }

    fn service(transport: &ScriptedTransport) -> ProductService<&ScriptedTransport> {
        ProductService::new(ProductClient::new("http://localhost:8080"), transport)
    }

    #[test]
    fn list_returns_all_records() {
        let transport = ScriptedTransport::default().reply(
            200,
            r#"[{"id":1,"name":"A","description":"d","price":1},
                {"id":2,"name":"B","description":"e","price":2}]"#,
        );
        let products = service(&transport).list_products().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "A");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].path, "http://localhost:8080/products");
    }

    #[test]
    fn create_sends_payload_and_returns_echo() {
        let transport = ScriptedTransport::default().reply(
            201,
            r#"{"id":1,"name":"Widget","description":"A widget","price":9.99}"#,
        );
        let input = CreateProduct {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
            category_id: None,
        };
        let created = service(&transport).create_product(&input).unwrap();
        assert_eq!(created.id, ProductId::from(1u64));
        assert_eq!(created.name, "Widget");
        assert_eq!(created.price, 9.99);

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        let sent: CreateProduct = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, input);
    }

    #[test]
    fn get_hits_item_path() {
        let transport = ScriptedTransport::default()
            .reply(200, r#"{"id":1,"name":"A","description":"d","price":1}"#);
        let product = service(&transport).get_product(&ProductId::from(1u64)).unwrap();
        assert_eq!(product.description, "d");
        assert_eq!(transport.requests()[0].path, "http://localhost:8080/products/1");
    }

    #[test]
    fn update_puts_full_payload() {
        let transport = ScriptedTransport::default()
            .reply(200, r#"{"id":1,"name":"A2","description":"d2","price":3,"category_id":"cat-2"}"#);
        let input = UpdateProduct {
            name: "A2".to_string(),
            description: "d2".to_string(),
            price: 3.0,
            category_id: Some("cat-2".to_string()),
        };
        let updated = service(&transport)
            .update_product(&ProductId::from(1u64), &input)
            .unwrap();
        assert_eq!(updated.name, "A2");
        assert_eq!(updated.category_id.as_deref(), Some("cat-2"));

        let requests = transport.requests();
        let request = &requests[0];
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "http://localhost:8080/products/1");
        let sent: UpdateProduct = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, input);
    }

    #[test]
    fn delete_resolves_whatever_the_body() {
        let transport = ScriptedTransport::default()
            .reply(204, "")
            .reply(200, "garbage")
            .reply(404, r#"{"error":"product not found"}"#);
        let svc = service(&transport);
        svc.delete_product(&ProductId::from(1u64)).unwrap();
        svc.delete_product(&ProductId::from(1u64)).unwrap();
        svc.delete_product(&ProductId::from(1u64)).unwrap();
        assert_eq!(transport.requests().len(), 3);
        assert!(transport
            .requests()
            .iter()
            .all(|r| r.method == HttpMethod::Delete && r.body.is_none()));
    }

    #[test]
    fn server_error_with_array_body_still_lists() {
        let transport = ScriptedTransport::default().reply(500, "[]");
        let products = service(&transport).list_products().unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn transport_failure_propagates_without_retry() {
        let transport = ScriptedTransport::default().fail("connection refused");
        let err = service(&transport).list_products().unwrap_err();
        assert!(matches!(err, ApiError::Transport(ref m) if m == "connection refused"));
        assert_eq!(transport.requests().len(), 1);
    }
}
