/// Renders a PostgreSQL connection URL for logs and diagnostics.
///
/// Credentials are masked with `***` wherever libpq accepts them: the
/// userinfo password and a `password` query parameter. Input that is not a
/// URL (such as a `key=value` connection string) is returned unchanged.
pub(crate) fn redact_url_password(url: &str) -> String {
    let Ok(mut parsed) = url::Url::parse(url) else {
        return url.to_string();
    };

    if parsed.password().is_some() {
        let _ = parsed.set_password(Some("***"));
    }

    let has_query_password = parsed.query_pairs().any(|(key, _)| key == "password");

    if has_query_password {
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(key, value)| {
                let value = if key == "password" { "***".into() } else { value };
                (key.into_owned(), value.into_owned())
            })
            .collect();

        parsed.query_pairs_mut().clear().extend_pairs(pairs);
    }

    parsed.to_string()
}
