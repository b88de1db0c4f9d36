use std::sync::LazyLock;

use folio_models::contact::ContactSubmission;

pub static ANA: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: "Ana".try_into().unwrap(),
    email: "ana@example.com".parse().unwrap(),
    message: "Hello".try_into().unwrap(),
});

pub static MALLORY: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: "Mallory".try_into().unwrap(),
    email: "mallory@example.com".parse().unwrap(),
    message: "<script>alert(document.cookie)</script>".try_into().unwrap(),
});
