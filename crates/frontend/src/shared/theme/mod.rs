//! Dark / light theme for the storefront.
//!
//! The theme is session state only: it starts dark and is applied by setting
//! `data-theme` and a `dark` class on `<body>`.

use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the theme name (used for CSS hooks).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon shown on the toggle (the theme you switch *to*).
    fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "sun",
            Theme::Light => "moon",
        }
    }
}

/// Apply theme hooks on the document body.
fn apply_theme(theme: Theme) {
    let body = match window().and_then(|w| w.document()).and_then(|d| d.body()) {
        Some(body) => body,
        None => return,
    };
    let _ = body.set_attribute("data-theme", theme.as_str());
    let _ = body.class_list().toggle_with_force("dark", theme == Theme::Dark);
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let context = ThemeContext {
        theme: RwSignal::new(Theme::default()),
    };
    apply_theme(Theme::default());
    provide_context(context);

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Round icon button flipping between dark and light.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="icon-btn"
            on:click=move |_| ctx.toggle()
            title=move || format!("Switch to {} theme", ctx.theme.get().toggled().display_name())
        >
            {move || crate::shared::icons::icon(ctx.theme.get().toggle_icon())}
        </button>
    }
}
