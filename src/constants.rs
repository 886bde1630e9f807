// Page wiring: element ids, selectors and glue messages. Every page loads
// the same module; whatever a page lacks is simply not wired.

// Scene canvas
pub const CANVAS_ID: &str = "bg-canvas";
pub const STATS_LOG_EVERY_FRAMES: u64 = 600; // ~10 s at 60 Hz

// Banner
pub const BANNER_TEXT_SELECTOR: &str = ".listen-text .text";
pub const BANNER_TEXT_CLASS: &str = "text"; // carries the CSS entrance animation
pub const BANNER_PARTICLE_PARENT: &str = "main";
pub const PARTICLE_CLASS: &str = "particle";

// Cursor trail
pub const MUSIC_NOTE_CLASS: &str = "music-note";

// Navigation
pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_SELECTOR: &str = "header nav";
pub const ACTIVE_CLASS: &str = "active";

// Gallery popup
pub const GALLERY_BUTTON_ID: &str = "gallery-btn";
pub const GALLERY_POPUP_ID: &str = "gallery-popup";
pub const GALLERY_CLOSE_ID: &str = "close-popup";

// Contact page
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const EMAIL_BUTTON_ID: &str = "emailCircle";
pub const PHONE_BUTTON_ID: &str = "phoneCircle";
pub const COPY_ATTR: &str = "data-copy"; // clipboard text, falls back to the element text
pub const FORM_SENT_MESSAGE: &str = "✅ Message sent successfully!";
pub const EMAIL_COPIED_MESSAGE: &str = "📋 Email copied to clipboard!";
pub const PHONE_COPIED_MESSAGE: &str = "📞 Phone number copied to clipboard!";

// Scene overrides are read from `data-<key>` attributes on the canvas
pub const OVERRIDE_ATTR_PREFIX: &str = "data-";
