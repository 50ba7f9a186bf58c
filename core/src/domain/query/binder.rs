use std::any::{Any, TypeId, type_name};

use tracing::debug;

use crate::domain::query::{
    entities::{errors::QueryError, query_request::QueryRequest},
    ports::{QueryRequestService, ValueSource},
    services::QueryKitService,
};

/// Outcome of a binding attempt.
pub enum ModelBindingResult {
    /// The binder does not handle the requested model type.
    NoResult,
    Success(Box<dyn Any + Send>),
    Failed(QueryError),
}

impl ModelBindingResult {
    pub fn is_set(&self) -> bool {
        !matches!(self, ModelBindingResult::NoResult)
    }
}

/// State shared between a framework and a chain of binders for one target.
pub struct ModelBindingContext<'a> {
    model_type: TypeId,
    model_name: &'static str,
    values: &'a dyn ValueSource,
    pub result: ModelBindingResult,
}

impl<'a> ModelBindingContext<'a> {
    pub fn for_model<T: 'static>(values: &'a dyn ValueSource) -> Self {
        Self {
            model_type: TypeId::of::<T>(),
            model_name: type_name::<T>(),
            values,
            result: ModelBindingResult::NoResult,
        }
    }

    pub fn model_type(&self) -> TypeId {
        self.model_type
    }

    pub fn model_name(&self) -> &'static str {
        self.model_name
    }

    pub fn values(&self) -> &'a dyn ValueSource {
        self.values
    }

    /// Takes the bound model out of the context.
    ///
    /// `Ok(None)` when nothing was bound or the bound value is not a `T`.
    pub fn into_model<T: 'static>(self) -> Result<Option<T>, QueryError> {
        match self.result {
            ModelBindingResult::NoResult => Ok(None),
            ModelBindingResult::Success(model) => Ok(model.downcast::<T>().ok().map(|model| *model)),
            ModelBindingResult::Failed(error) => Err(error),
        }
    }
}

pub trait ModelBinder {
    /// Binds `ctx`'s target model. Binders that do not apply leave the result
    /// untouched.
    fn bind_model(&self, ctx: &mut ModelBindingContext<'_>);
}

impl ModelBinder for QueryKitService {
    fn bind_model(&self, ctx: &mut ModelBindingContext<'_>) {
        if ctx.model_type() != TypeId::of::<QueryRequest>() {
            debug!(model = ctx.model_name(), "not a query request, skipping");
            return;
        }

        ctx.result = match self.build_query_request(ctx.values()) {
            Ok(request) => ModelBindingResult::Success(Box::new(request)),
            Err(error) => ModelBindingResult::Failed(error),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::{common::ParserLimits, query::value_objects::LogicalOperator};

    fn values() -> HashMap<String, String> {
        HashMap::from([
            ("page".to_string(), "4".to_string()),
            ("__cdgr.__o".to_string(), "1".to_string()),
        ])
    }

    #[test]
    fn test_binds_query_request() {
        let values = values();
        let mut ctx = ModelBindingContext::for_model::<QueryRequest>(&values);
        QueryKitService::default().bind_model(&mut ctx);

        assert!(ctx.result.is_set());
        let request = ctx.into_model::<QueryRequest>().unwrap().unwrap();
        assert_eq!(request.page, Some(4));
        assert_eq!(request.root_group.operator(), LogicalOperator::Or);
    }

    #[test]
    fn test_other_model_type_is_a_no_op() {
        let values = values();
        let mut ctx = ModelBindingContext::for_model::<String>(&values);
        QueryKitService::default().bind_model(&mut ctx);

        assert!(!ctx.result.is_set());
        assert_eq!(ctx.into_model::<String>(), Ok(None));
    }

    #[test]
    fn test_limit_breach_is_reported() {
        let values = HashMap::from([
            ("__cdgr.__o".to_string(), "0".to_string()),
            ("__cdgr.__cdgr[0].__o".to_string(), "0".to_string()),
        ]);
        let service = QueryKitService {
            limits: ParserLimits {
                max_depth: 0,
                ..Default::default()
            },
        };
        let mut ctx = ModelBindingContext::for_model::<QueryRequest>(&values);
        service.bind_model(&mut ctx);

        assert!(matches!(
            ctx.into_model::<QueryRequest>(),
            Err(QueryError::DepthExceeded { max: 0 })
        ));
    }
}
