use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use puppybowl_app::{SubmitOutcome, forms::NewPlayerForm};
use puppybowl_types::player::PlayerId;

use crate::{
    components::{NewPlayerFormData, RosterPageData, render_roster_page},
    http::AppState,
};

fn render_page(state: &AppState, form: NewPlayerFormData) -> Html<String> {
    let data = RosterPageData::new(&state.app.snapshot(), form);
    Html(render_roster_page(data))
}

/// GET / – Render the roster, details and form from current state.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    render_page(&state, NewPlayerFormData::blank())
}

/// GET /players/{id} – A roster card was clicked.
pub async fn select_player(
    State(state): State<AppState>,
    Path(id): Path<PlayerId>,
) -> impl IntoResponse {
    state.app.select_player(id).await;
    render_page(&state, NewPlayerFormData::blank())
}

/// POST /players/{id}/remove – The removal control was pressed.
pub async fn remove_player(
    State(state): State<AppState>,
    Path(id): Path<PlayerId>,
) -> impl IntoResponse {
    state.app.remove_player(id).await;
    Redirect::to("/")
}

/// POST /players – The new-puppy form was submitted.
pub async fn create_player(
    State(state): State<AppState>,
    Form(form): Form<NewPlayerForm>,
) -> Response {
    match state.app.submit_new_player(&form).await {
        SubmitOutcome::Created => Redirect::to("/").into_response(),
        SubmitOutcome::Rejected(e) => {
            let form = NewPlayerFormData::from(&form).with_alert(e.to_string());
            (StatusCode::UNPROCESSABLE_ENTITY, render_page(&state, form)).into_response()
        }
        SubmitOutcome::Failed => render_page(&state, NewPlayerFormData::from(&form)).into_response(),
    }
}
