use futures::TryFutureExt;
use js_sys::Promise;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{Request, RequestInit, Response};

fn wrap_response_into_json(value: JsValue) -> JsFuture {
    assert!(value.is_instance_of::<Response>());
    let resp: Response = value.dyn_into().unwrap();
    JsFuture::from(resp.json().unwrap())
}

pub fn fetch(request: &Request) -> Promise {
    let resp_value = JsFuture::from(web_sys::window().unwrap().fetch_with_request(request))
        .and_then(wrap_response_into_json);

    future_to_promise(resp_value)
}

fn request_url(method: &str, url: &str) -> Request {
    let mut opts = RequestInit::new();
    opts.method(method);

    Request::new_with_str_and_init(url, &opts).unwrap()
}

pub fn request_content() -> Request {
    request_url("GET", "/api/content")
}
