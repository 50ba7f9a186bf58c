pub mod inspect_query;
