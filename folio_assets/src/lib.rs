//! Static files embedded into the binary at compile time.
//!
//! Every file below `assets/` becomes a constant named after the file, every
//! directory becomes a module, e.g. `assets/templates/contact_message.html`
//! is available as [`templates::CONTACT_MESSAGE_HTML`].

include!(env!("ASSETS"));
