//! Builds the tenant-callback URL every successful sign-in flow 302s to
//! (spec §8 scenario 1: `.../auth/callback?code=<hex32>&returnTo=/cart`).

/// `origin` is the validated redirect origin; `original_redirect` is the
/// full URL the caller asked to return to, whose path+query becomes
/// `returnTo`.
pub fn build(origin: &str, code: &str, original_redirect: &str) -> String {
    let return_to = url::Url::parse(original_redirect)
        .map(|parsed| match parsed.query() {
            Some(query) => format!("{}?{}", parsed.path(), query),
            None => parsed.path().to_string(),
        })
        .unwrap_or_else(|_| "/".to_string());

    format!("{origin}/auth/callback?code={code}&returnTo={return_to}")
}
