//! GraphQL schema builder for the Emporium API

use async_graphql::{Context, EmptySubscription, Schema};
use emporium_account::{service::AccountServices, Caller};

use crate::{errors::context_error, mutation::MutationRoot, query::QueryRoot};

pub type AccountSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the async-graphql schema around the account services
///
/// The schema is configured with:
/// - The service container injected as schema data
/// - Query depth limit (10 levels) to prevent excessive nesting
/// - Query complexity limit (200 points) to prevent expensive operations
///
/// The caller is not part of the schema; the HTTP handler attaches it to each
/// request as request data.
pub fn build_schema(services: AccountServices) -> AccountSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .limit_depth(10)
        .limit_complexity(200)
        .data(services)
        .finish()
}

/// Export the GraphQL schema to SDL (Schema Definition Language) format
pub fn export_schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription).finish().sdl()
}

pub(crate) fn services<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a AccountServices> {
    ctx.data::<AccountServices>()
        .map_err(|e| context_error("account services", e.message))
}

/// The caller of the current request, `None` for anonymous requests.
pub(crate) fn caller<'a>(ctx: &Context<'a>) -> Option<&'a Caller> {
    ctx.data_opt::<Caller>()
}
