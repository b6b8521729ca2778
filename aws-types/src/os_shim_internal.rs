/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Process environment access that tests can replace

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;

/// Environment variable lookup
///
/// Region and user agent providers read the process environment through `Env` so that tests can
/// hand them a fixed set of variables instead of mutating global state.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<Arc<HashMap<String, String>>>,
}

impl Env {
    /// Read from the real process environment ([`std::env::var`](std::env::var))
    pub fn real() -> Self {
        Env { overrides: None }
    }

    /// A fixed environment holding only `vars`
    ///
    /// ```rust
    /// use aws_types::os_shim_internal::Env;
    /// let env = Env::from_slice(&[("AWS_REGION", "eu-central-1")]);
    /// assert_eq!(env.get("AWS_REGION").unwrap(), "eu-central-1");
    /// ```
    pub fn from_slice(vars: &[(&str, &str)]) -> Self {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Env {
            overrides: Some(Arc::new(vars)),
        }
    }

    pub fn get(&self, key: &str) -> Result<String, VarError> {
        match &self.overrides {
            None => std::env::var(key),
            Some(vars) => vars.get(key).cloned().ok_or(VarError::NotPresent),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use std::env::VarError;

    #[test]
    fn fixed_environment() {
        let env = Env::from_slice(&[("AWS_DEFAULT_REGION", "us-east-1")]);
        assert_eq!(env.get("AWS_DEFAULT_REGION").unwrap(), "us-east-1");
        assert_eq!(
            env.get("AWS_REGION").expect_err("not set"),
            VarError::NotPresent
        );
    }
}
