//! Pending, error and not-found presentations shared by both routes

use super::{back_link, BUTTON_CLASS, PAGE_CLASS};
use crate::config::SiteConfig;
use crate::helpers::html_escape;

/// Spinner with a label
pub fn pending(label: &str) -> String {
    format!(
        r#"<div class="{page} flex items-center justify-center">
<div class="text-center">
<div class="inline-block animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-cyan-400"></div>
<p class="text-gray-400 mt-4">{label}</p>
</div>
</div>"#,
        page = PAGE_CLASS,
        label = html_escape(label),
    )
}

/// Error message with guidance, optionally linking back to the list
pub fn error(config: &SiteConfig, heading: &str, message: &str, link_back: bool) -> String {
    let (guidance_class, link) = if link_back {
        ("text-gray-400 text-sm mb-6", back_link(config, BUTTON_CLASS))
    } else {
        ("text-gray-400 text-sm", String::new())
    };

    format!(
        r#"<div class="{page} flex items-center justify-center">
<div class="max-w-md mx-auto px-4">
<div class="bg-red-900/20 border border-red-500/50 rounded-xl p-8 text-center">
<h2 class="text-2xl font-bold text-red-400 mb-4">{heading}</h2>
<p class="text-gray-300 mb-4">{message}</p>
<p class="{guidance_class}">Please make sure Strapi is running on {origin}</p>
{link}
</div>
</div>
</div>"#,
        page = PAGE_CLASS,
        heading = html_escape(heading),
        message = html_escape(message),
        guidance_class = guidance_class,
        origin = html_escape(&config.api_origin()),
        link = link,
    )
}

/// Friendly not-found message with a link back to the list
pub fn not_found(config: &SiteConfig, heading: &str, message: &str) -> String {
    format!(
        r#"<div class="{page} flex items-center justify-center">
<div class="max-w-md mx-auto px-4">
<div class="bg-slate-800/50 backdrop-blur-sm border border-slate-700 rounded-xl p-12 text-center">
<h2 class="text-3xl font-bold text-white mb-4">{heading}</h2>
<p class="text-gray-400 mb-8">{message}</p>
{link}
</div>
</div>
</div>"#,
        page = PAGE_CLASS,
        heading = html_escape(heading),
        message = html_escape(message),
        link = back_link(config, BUTTON_CLASS),
    )
}
