//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check pattern shape (normalized, non-empty view fields)
//! - Check the fallback is configured exactly once
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Duplicate patterns and unknown redirect targets are left to route table
//!   construction, which is the single authority on ambiguity

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::{is_normalized, ViewDescriptor};

/// A single semantic problem in a route configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no routes defined")]
    NoRoutes,

    #[error("route pattern {0:?} is not a normalized path")]
    UnnormalizedPattern(String),

    #[error("route {pattern:?} has an empty {field}")]
    EmptyField { pattern: String, field: &'static str },

    #[error("fallback must set exactly one of `redirect_to` or `view`")]
    AmbiguousFallback,

    #[error("fallback redirect target {0:?} is not a normalized path")]
    UnnormalizedRedirect(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    for route in &config.routes {
        if !is_normalized(&route.pattern) {
            errors.push(ValidationError::UnnormalizedPattern(route.pattern.clone()));
        }
        check_view(&route.pattern, &route.view, &mut errors);
    }

    let fallback = &config.fallback;
    match (&fallback.redirect_to, &fallback.view) {
        (Some(target), None) => {
            if !is_normalized(target) {
                errors.push(ValidationError::UnnormalizedRedirect(target.clone()));
            }
        }
        (None, Some(view)) => check_view("<fallback>", view, &mut errors),
        _ => errors.push(ValidationError::AmbiguousFallback),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_view(pattern: &str, view: &ViewDescriptor, errors: &mut Vec<ValidationError>) {
    let fields = [
        ("template_ref", &view.template_ref),
        ("controller_name", &view.controller_name),
        ("binding_alias", &view.binding_alias),
    ];

    for (field, value) in fields {
        if value.trim().is_empty() {
            errors.push(ValidationError::EmptyField {
                pattern: pattern.to_string(),
                field,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{FallbackConfig, RouteDefinition};

    #[test]
    fn test_reference_config_is_valid() {
        assert_eq!(validate_config(&RouterConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = RouterConfig {
            routes: vec![
                RouteDefinition::new("login/", ViewDescriptor::new("", "loginCtrl", "vm")),
                RouteDefinition::new("/ok", ViewDescriptor::new("./ok.html", "okCtrl", " ")),
            ],
            fallback: FallbackConfig::default(),
            ..RouterConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::UnnormalizedPattern("login/".into()),
                ValidationError::EmptyField {
                    pattern: "login/".into(),
                    field: "template_ref",
                },
                ValidationError::EmptyField {
                    pattern: "/ok".into(),
                    field: "binding_alias",
                },
                ValidationError::AmbiguousFallback,
            ]
        );
    }

    #[test]
    fn test_fallback_with_both_forms_rejected() {
        let mut config = RouterConfig::default();
        config.fallback.view = Some(ViewDescriptor::new("./404.html", "nfCtrl", "vm"));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::AmbiguousFallback]);
    }

    #[test]
    fn test_no_routes() {
        let config = RouterConfig {
            routes: Vec::new(),
            fallback: FallbackConfig {
                redirect_to: None,
                view: Some(ViewDescriptor::new("./home.html", "homeCtrl", "vm")),
            },
            ..RouterConfig::default()
        };

        assert_eq!(validate_config(&config), Err(vec![ValidationError::NoRoutes]));
    }

    #[test]
    fn test_unnormalized_redirect() {
        let mut config = RouterConfig::default();
        config.fallback = FallbackConfig::redirect("/login/");

        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::UnnormalizedRedirect("/login/".into())])
        );
    }
}
