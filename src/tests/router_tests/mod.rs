mod pages_tests;

use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Build a GET request for the router
pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = path.parse().unwrap();
    req
}

/// Build a POST request carrying a JSON body
pub fn post_json(path: &str, body: &serde_json::Value) -> Request {
    let mut req = Request::new(Body::from(serde_json::to_vec(body).unwrap()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = path.parse().unwrap();
    req.headers_mut()
        .insert("Content-Type", "application/json".parse().unwrap());
    req
}

/// Build a POST request with a raw (possibly invalid) body
pub fn post_raw(path: &str, body: &str) -> Request {
    let mut req = Request::new(Body::from(body.as_bytes().to_vec()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn body_string(resp: Response) -> String {
    let mut out = String::new();
    resp.into_body().reader().read_to_string(&mut out).unwrap();
    out
}

pub fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}
