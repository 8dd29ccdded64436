use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name under `/icons`, without the `.svg` extension
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ENVELOPE: &str = "envelope";
    pub const LOCK: &str = "lock";
    pub const EYE: &str = "eye";
    pub const EYE_SLASH: &str = "eye-slash";
    pub const USER: &str = "user";
    pub const PHONE: &str = "phone";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const SCALE: &str = "scale";
}
