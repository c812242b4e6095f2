use actix_web::web;

use crate::types::error::AppError;

pub mod books;
pub mod review;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );

    cfg.service(user::register::register)
        .service(user::login::login);

    // The /async/* paths are kept as aliases of the plain lookups.
    cfg.service(
        web::resource(["/", "/async/books"]).route(web::get().to(books::list::list_books)),
    )
    .service(
        web::resource(["/isbn/{isbn}", "/async/isbn/{isbn}"])
            .route(web::get().to(books::isbn::book_by_isbn)),
    )
    .service(
        web::resource(["/author/{author}", "/async/author/{author}"])
            .route(web::get().to(books::author::books_by_author)),
    )
    .service(
        web::resource(["/title/{title}", "/async/title/{title}"])
            .route(web::get().to(books::title::books_by_title)),
    )
    .service(web::resource("/review/{isbn}").route(web::get().to(books::reviews::book_reviews)));

    cfg.service(
        web::resource("/auth/review/{isbn}")
            .route(web::put().to(review::upsert::upsert_review))
            .route(web::delete().to(review::delete::delete_review)),
    );
}
