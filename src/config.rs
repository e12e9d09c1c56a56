/// Site key for the Cloudflare Turnstile widget embedded in the contact form.
pub const TURNSTILE_SITE_KEY: &str = "0x4AAAAAAB2--dgKAx3_GFgq";

#[cfg(debug_assertions)]
pub fn worker_url() -> &'static str {
    "http://localhost:8787" // Local wrangler dev instance
}

#[cfg(not(debug_assertions))]
pub fn worker_url() -> &'static str {
    "https://worker-conectait.soportealvarojeria.workers.dev"
}
