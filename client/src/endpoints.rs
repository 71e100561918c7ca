//! URL construction for the upstream resources

use reqwest::Url;

use crate::error::FetchError;

/// `{base}/pokemon/{id}/`
pub fn pokemon_url(base: &Url, id: u32) -> Result<Url, FetchError> {
    with_segments(base, &["pokemon", &id.to_string(), ""])
}

/// `{base}/type/{name}`, with `name` percent-encoded as a single segment
pub fn type_url(base: &Url, name: &str) -> Result<Url, FetchError> {
    with_segments(base, &["type", name])
}

/// Parse a detail URL handed out by a type resource
pub fn member_url(raw: &str) -> Result<Url, FetchError> {
    Url::parse(raw).map_err(|e| FetchError::Endpoint(format!("{:?}: {}", raw, e)))
}

fn with_segments(base: &Url, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| FetchError::Endpoint(format!("{} cannot be a base URL", base)))?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://pokeapi.co/api/v2/").unwrap()
    }

    #[test]
    fn test_pokemon_url() {
        let url = pokemon_url(&base(), 25).unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/25/");
    }

    #[test]
    fn test_pokemon_url_base_without_slash() {
        let base = Url::parse("http://localhost:8080/api/v2").unwrap();
        let url = pokemon_url(&base, 1).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v2/pokemon/1/");
    }

    #[test]
    fn test_type_url() {
        let url = type_url(&base(), "fire").unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/type/fire");
    }

    #[test]
    fn test_type_url_escapes_segment() {
        let url = type_url(&base(), "a/b c").unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/type/a%2Fb%20c");
    }

    #[test]
    fn test_member_url_invalid() {
        assert!(matches!(member_url(""), Err(FetchError::Endpoint(_))));
    }

    #[test]
    fn test_cannot_be_base() {
        let base = Url::parse("mailto:ash@example.com").unwrap();
        assert!(matches!(pokemon_url(&base, 1), Err(FetchError::Endpoint(_))));
    }
}
