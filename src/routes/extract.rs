use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use serde::de::DeserializeOwned;
use std::future::{ready, Ready};
use validator::Validate;

use crate::error::{handle_query_payload_error, ApiError};
use crate::models::requests::{encode_query_pairs, split_report_query};
use crate::models::ReportFilter;

/// Query-string extractor for the report endpoints.
///
/// Pulls the repeatable `partnerIds` and the optional filters out of the
/// query, deserializes the remaining keys into `T` and validates it. Any
/// failure rejects the request before the handler runs.
#[derive(Debug, Clone)]
pub struct ReportQuery<T> {
    pub params: T,
    pub filter: ReportFilter,
}

impl<T> ReportQuery<T>
where
    T: DeserializeOwned + Validate,
{
    fn extract(req: &HttpRequest) -> Result<Self, actix_web::Error> {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
            .map_err(|e| handle_query_payload_error(e, req))?
            .into_inner();

        let (filter, rest) = split_report_query(pairs);

        let params = web::Query::<T>::from_query(&encode_query_pairs(&rest))
            .map_err(|e| handle_query_payload_error(e, req))?
            .into_inner();

        if let Err(errors) = params.validate() {
            tracing::info!("Validation failed on {}: field_errors={:?}", req.path(), errors);
            return Err(ApiError::Validation(errors.to_string()).into());
        }

        Ok(Self { params, filter })
    }
}

impl<T> FromRequest for ReportQuery<T>
where
    T: DeserializeOwned + Validate,
{
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::extract(req))
    }
}
