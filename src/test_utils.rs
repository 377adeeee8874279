//! Helpers for rendering components to HTML in tests.

use yew::{BaseComponent, ServerRenderer};

/// Server-renders `C` with the props built by `props`, without hydration
/// markers.
pub async fn render<C>(props: impl FnOnce() -> C::Properties + Send + 'static) -> String
where
    C: BaseComponent,
{
    ServerRenderer::<C>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

/// How text nodes come out of the renderer.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
