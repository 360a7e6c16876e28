#[macro_export]
macro_rules! test_request {
    ($method:ident $path:expr => $status:ident) => {
        {
            let app = $crate::api::test::get_test_app().await;
            let req = actix_web::test::TestRequest::with_uri($path)
                .method(http::Method::$method)
                .insert_header(("User-Agent", "Test"))
                .to_request();

            let response = actix_web::test::call_service(&app, req).await;
            $crate::api::test::assert_status(response, http::StatusCode::$status).await
        }
    };

    ($method:ident $path:expr, raw $body:expr => $status:ident) => {
        {
            let app = $crate::api::test::get_test_app().await;
            let req = actix_web::test::TestRequest::with_uri($path)
                .method(http::Method::$method)
                .insert_header(("Content-Type", "application/json"))
                .set_payload($body)
                .insert_header(("User-Agent", "Test"))
                .to_request();

            let response = actix_web::test::call_service(&app, req).await;
            $crate::api::test::assert_status(response, http::StatusCode::$status).await
        }
    };

    ($method:ident $path:expr, $body:expr => $status:ident) => {
        {
            let app = $crate::api::test::get_test_app().await;
            let req = actix_web::test::TestRequest::with_uri($path)
                .method(http::Method::$method)
                .set_json(&$body)
                .insert_header(("User-Agent", "Test"))
                .to_request();

            let response = actix_web::test::call_service(&app, req).await;
            $crate::api::test::assert_status(response, http::StatusCode::$status).await
        }
    };

    ($method:ident $path:expr => $status:ident with content) => {
        {
            let response = test_request!($method $path => $status);
            $crate::api::test::get_content(response).await
        }
    };

    ($method:ident $path:expr, raw $body:expr => $status:ident with content) => {
        {
            let response = test_request!($method $path, raw $body => $status);
            $crate::api::test::get_content(response).await
        }
    };

    ($method:ident $path:expr, $body:expr => $status:ident with content) => {
        {
            let response = test_request!($method $path, $body => $status);
            $crate::api::test::get_content(response).await
        }
    };
}
