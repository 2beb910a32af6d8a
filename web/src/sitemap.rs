/*
 * SPDX-FileCopyrightText: 2026 Holonet Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
}

const fn endpoint(method: &'static str, path: &'static str) -> Endpoint {
    Endpoint { method, path }
}

/// Every route registered by [`crate::create_router`], in registration order.
pub const ENDPOINTS: &[Endpoint] = &[
    endpoint("GET", "/"),
    endpoint("GET", "/health"),
    endpoint("GET", "/people"),
    endpoint("POST", "/people"),
    endpoint("GET", "/people/{id}"),
    endpoint("PUT", "/people/{id}"),
    endpoint("DELETE", "/people/{id}"),
    endpoint("GET", "/planets"),
    endpoint("POST", "/planets"),
    endpoint("GET", "/planets/{id}"),
    endpoint("PUT", "/planets/{id}"),
    endpoint("DELETE", "/planets/{id}"),
    endpoint("GET", "/users"),
    endpoint("GET", "/users/{id}/favorites"),
    endpoint("POST", "/users/{id}/favorite/people/{people_id}"),
    endpoint("DELETE", "/users/{id}/favorite/people/{people_id}"),
    endpoint("POST", "/users/{id}/favorite/planet/{planet_id}"),
    endpoint("DELETE", "/users/{id}/favorite/planet/{planet_id}"),
    endpoint("GET", "/admin/"),
    endpoint("GET", "/admin/{table}"),
    endpoint("GET", "/admin/{table}/new"),
    endpoint("POST", "/admin/{table}/new"),
    endpoint("GET", "/admin/{table}/{id}/edit"),
    endpoint("POST", "/admin/{table}/{id}/edit"),
    endpoint("POST", "/admin/{table}/{id}/delete"),
];

#[derive(Serialize, Debug)]
pub struct Sitemap {
    pub endpoints: Vec<Endpoint>,
    pub admin: &'static str,
}

pub fn generate_sitemap() -> Sitemap {
    let mut endpoints = ENDPOINTS.to_vec();
    endpoints.sort_by(|a, b| a.path.cmp(b.path).then(a.method.cmp(b.method)));

    Sitemap {
        endpoints,
        admin: "/admin/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_is_sorted_and_complete() {
        let sitemap = generate_sitemap();

        assert_eq!(sitemap.endpoints.len(), ENDPOINTS.len());
        assert_eq!(sitemap.endpoints[0], endpoint("GET", "/"));
        assert!(
            sitemap
                .endpoints
                .windows(2)
                .all(|w| (w[0].path, w[0].method) <= (w[1].path, w[1].method))
        );
    }

    #[test]
    fn test_sitemap_has_no_duplicates() {
        let mut endpoints = ENDPOINTS.to_vec();
        endpoints.sort_by(|a, b| a.path.cmp(b.path).then(a.method.cmp(b.method)));
        endpoints.dedup();

        assert_eq!(endpoints.len(), ENDPOINTS.len());
    }
}
