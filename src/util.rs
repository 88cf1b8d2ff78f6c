use url::Url;

/// Join base url with another (possibly relative) url
pub fn join_url(current_url: &str, url: &str) -> Option<String> {
    let u = Url::parse(current_url).ok()?;
    u.join(url).ok().map(|u| u.to_string())
}

/// Reduce a company url to scheme + host (+ port). Urls without a scheme are
/// assumed to be https.
pub fn canonical_base(url: &str) -> Option<String> {
    let url = url.trim();
    let url_ = match Url::parse(url) {
        Ok(u) if u.has_host() => u,
        _ => Url::parse(&format!("https://{}", url)).ok()?,
    };
    if url_.scheme() != "http" && url_.scheme() != "https" {
        return None;
    }
    let host = url_.host_str()?;
    match url_.port() {
        Some(port) => Some(format!("{}://{}:{}", url_.scheme(), host, port)),
        None => Some(format!("{}://{}", url_.scheme(), host)),
    }
}

pub fn get_robot_url(url: &str) -> Option<String> {
    let mut url_ = Url::parse(url).ok()?;
    if url_.scheme() != "http" && url_.scheme() != "https" {
        return None;
    }
    url_.set_path("/robots.txt");
    url_.set_query(None);
    url_.set_fragment(None);
    Some(url_.to_string())
}
