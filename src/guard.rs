//! Route-guard evaluation — pure decisions over a navigation target and the
//! session's identity. The embedding UI performs the actual navigation.

use crate::domain::auth::UserInfo;
use crate::shared::Role;

/// Where unauthenticated navigation is sent.
pub const LOGIN_PATH: &str = "/auth/login";

/// Where a non-seller landing on seller pages is sent.
pub const SELLER_APPLY_PATH: &str = "/seller/apply";

/// Paths reachable without authentication. The catalogue and shop subtrees
/// (`/products/…`, `/shops/…`) are public as well.
const PUBLIC_PATHS: &[&str] = &["/", "/products", "/shops", "/auth/login", "/auth/register"];

/// Outcome of evaluating a navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    /// Send to the login page, carrying the original destination in a
    /// percent-encoded `redirect` query parameter.
    RedirectToLogin { target: String },
    /// Send to a role-specific fallback.
    Redirect { target: String },
}

/// Decide navigation for `path` given the current identity.
///
/// `full_path` is the complete destination including query string; it is what
/// gets preserved in the login redirect. `/seller/apply` itself only requires
/// authentication, otherwise the seller fallback would loop.
pub fn evaluate(path: &str, full_path: &str, user: Option<&UserInfo>) -> RouteDecision {
    if is_public(path) {
        return RouteDecision::Allow;
    }

    let Some(user) = user else {
        return RouteDecision::RedirectToLogin {
            target: format!(
                "{}?redirect={}",
                LOGIN_PATH,
                urlencoding::encode(full_path)
            ),
        };
    };

    if path.starts_with("/seller")
        && path != SELLER_APPLY_PATH
        && !user.has_role(Role::Seller)
    {
        return RouteDecision::Redirect {
            target: SELLER_APPLY_PATH.to_string(),
        };
    }

    if path.starts_with("/admin") && !user.has_role(Role::Admin) {
        return RouteDecision::Redirect {
            target: "/".to_string(),
        };
    }

    RouteDecision::Allow
}

fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path) || path.starts_with("/products/") || path.starts_with("/shops/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: &[Role]) -> UserInfo {
        UserInfo {
            id: 1,
            username: "u".to_string(),
            roles: roles.to_vec(),
        }
    }

    #[test]
    fn public_paths_bypass_auth() {
        assert_eq!(evaluate("/", "/", None), RouteDecision::Allow);
        assert_eq!(evaluate("/products", "/products", None), RouteDecision::Allow);
        assert_eq!(
            evaluate("/products/42", "/products/42", None),
            RouteDecision::Allow
        );
        assert_eq!(evaluate("/shops/3", "/shops/3", None), RouteDecision::Allow);
        assert_eq!(
            evaluate("/auth/register", "/auth/register", None),
            RouteDecision::Allow
        );
    }

    #[test]
    fn anonymous_private_path_redirects_to_login_with_encoded_return() {
        let decision = evaluate("/cart", "/cart?from=nav", None);
        assert_eq!(
            decision,
            RouteDecision::RedirectToLogin {
                target: "/auth/login?redirect=%2Fcart%3Ffrom%3Dnav".to_string()
            }
        );
    }

    #[test]
    fn plain_user_on_seller_path_falls_back_to_apply() {
        let u = user(&[Role::User]);
        assert_eq!(
            evaluate("/seller/products", "/seller/products", Some(&u)),
            RouteDecision::Redirect {
                target: "/seller/apply".to_string()
            }
        );
        // The fallback target itself must stay reachable.
        assert_eq!(
            evaluate("/seller/apply", "/seller/apply", Some(&u)),
            RouteDecision::Allow
        );
    }

    #[test]
    fn seller_passes_seller_gate() {
        let u = user(&[Role::User, Role::Seller]);
        assert_eq!(
            evaluate("/seller/orders", "/seller/orders", Some(&u)),
            RouteDecision::Allow
        );
    }

    #[test]
    fn non_admin_on_admin_path_goes_home() {
        let u = user(&[Role::Seller]);
        assert_eq!(
            evaluate("/admin/shops", "/admin/shops", Some(&u)),
            RouteDecision::Redirect {
                target: "/".to_string()
            }
        );
        let a = user(&[Role::Admin]);
        assert_eq!(
            evaluate("/admin/shops", "/admin/shops", Some(&a)),
            RouteDecision::Allow
        );
    }

    #[test]
    fn authenticated_user_on_plain_private_path_is_allowed() {
        let u = user(&[Role::User]);
        assert_eq!(evaluate("/cart", "/cart", Some(&u)), RouteDecision::Allow);
        assert_eq!(
            evaluate("/orders/7", "/orders/7", Some(&u)),
            RouteDecision::Allow
        );
    }
}
