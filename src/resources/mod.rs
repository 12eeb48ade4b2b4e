//! # Resource wrappers
//!
//! A wrapper holds the model CloudStack answered with and exposes the
//! operations of that resource. Fields of the model are reachable through
//! `Deref`:
//!
//! ```no_run
//! # async fn run(client: &dyn marvin::client::ApiClient) -> marvin::Result<()> {
//! use marvin::api::infra::ListZones;
//! use marvin::resources::infra::Zone;
//!
//! for zone in Zone::list(client, &ListZones::default()).await? {
//!     println!("{} ({:?})", zone.id, zone.networktype);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Constructors are associated functions taking the client first, instance
//! operations borrow the wrapper. Operations that change the resource
//! return the updated wrapper.

/// Declares a wrapper around a model of [`marvin_models`]
macro_rules! resource {
    ($(#[$meta:meta])* $name:ident($model:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(pub $model);

        impl std::ops::Deref for $name {
            type Target = $model;

            fn deref(&self) -> &$model {
                &self.0
            }
        }

        impl From<$model> for $name {
            fn from(model: $model) -> $name {
                $name(model)
            }
        }

        impl $name {
            pub fn into_inner(self) -> $model {
                self.0
            }
        }
    };
}

pub mod account;
pub mod compute;
pub mod infra;
pub mod misc;
pub mod network;
pub mod offering;
pub mod storage;

/// Wraps every model of a list answer
fn wrap_all<M, W: From<M>>(models: Vec<M>) -> Vec<W> {
    models.into_iter().map(W::from).collect()
}

/// First element of a list answer, `what` names the resource in the error
pub(crate) fn first<T>(mut items: Vec<T>, what: &str) -> crate::Result<T> {
    if items.is_empty() {
        return Err(crate::MarvinError::NotFound(what.to_string()));
    }
    Ok(items.swap_remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_of_empty_list() {
        let err = first(Vec::<u8>::new(), "template").unwrap_err();
        assert_eq!(err.to_string(), "No template found");
        assert_eq!(first(vec![1, 2], "number").unwrap(), 1);
    }
}
