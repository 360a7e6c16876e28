macro_rules! json_responder {
    ($t:ty) => {
        impl actix_web::Responder for $t {
            type Body = actix_web::body::BoxBody;

            fn respond_to(
                self,
                _req: &actix_web::HttpRequest,
            ) -> actix_web::HttpResponse<Self::Body> {
                actix_web::HttpResponse::Ok()
                    .content_type("application/json; charset=utf-8")
                    .json(&self)
            }
        }
    };
}
