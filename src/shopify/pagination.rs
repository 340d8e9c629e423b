/// Extract the `rel="next"` target from a Shopify `Link` header.
///
/// Shopify's cursor pagination returns headers such as
/// `<https://shop/admin/api/2024-01/orders.json?limit=250&page_info=abc>; rel="next"`,
/// optionally preceded by a `rel="previous"` entry.
pub fn next_page_url(header: &str) -> Option<String> {
    header.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| {
            let param = param.trim();
            param
                .strip_prefix("rel=")
                .map(|rel| rel.trim_matches('"').eq_ignore_ascii_case("next"))
                .unwrap_or(false)
        });

        if !is_next {
            return None;
        }

        target
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .filter(|url| !url.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREV: &str = "https://demo.myshopify.com/admin/api/2024-01/orders.json?page_info=p1";
    const NEXT: &str = "https://demo.myshopify.com/admin/api/2024-01/orders.json?page_info=p3";

    #[test]
    fn finds_next_link() {
        let header = format!("<{NEXT}>; rel=\"next\"");

        assert_eq!(next_page_url(&header).as_deref(), Some(NEXT));
    }

    #[test]
    fn skips_previous_link() {
        let header = format!("<{PREV}>; rel=\"previous\", <{NEXT}>; rel=\"next\"");

        assert_eq!(next_page_url(&header).as_deref(), Some(NEXT));
    }

    #[test]
    fn last_page_has_no_next() {
        let header = format!("<{PREV}>; rel=\"previous\"");

        assert_eq!(next_page_url(&header), None);
    }

    #[test]
    fn malformed_header_yields_none() {
        assert_eq!(next_page_url(""), None);
        assert_eq!(next_page_url("rel=\"next\""), None);
        assert_eq!(next_page_url("<>; rel=\"next\""), None);
    }
}
