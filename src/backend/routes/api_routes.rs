/**
 * API Route Handlers
 *
 * Book, chapter and translation endpoints.
 *
 * # Routes
 *
 * ## Books
 * - `POST /api/books` - Create a book
 * - `GET /api/books` - List all books
 *
 * ## Chapters
 * - `POST /api/chapters` - Create a chapter under a book
 * - `GET /api/chapters?book_id=` - List chapters, optionally for one book
 * - `GET /api/chapters/{id}` - Fetch a chapter
 * - `PATCH /api/chapters/{id}` - Replace a chapter's translation text
 *
 * ## Translation
 * - `POST /api/translate` - Placeholder machine translation
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::library::handlers::{
    create_book, create_chapter, get_chapter, list_books, list_chapters, update_chapter,
};
use crate::backend::server::state::AppState;
use crate::backend::translate::handle_translate;

/// Configure API routes
///
/// Handlers extract `Arc<dyn DocumentStore>` from `AppState`; the translate
/// endpoint is stateless.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Book endpoints
        .route("/api/books", post(create_book).get(list_books))
        // Chapter endpoints
        .route("/api/chapters", post(create_chapter).get(list_chapters))
        .route(
            "/api/chapters/{id}",
            get(get_chapter).patch(update_chapter),
        )
        // Translation stub
        .route("/api/translate", post(handle_translate))
}
