// Backend Test Suite
// Organized by component: errors, models, query layer, storage, service, config

#[cfg(test)]
mod support;

#[cfg(test)]
mod error_tests;


#[cfg(test)]
mod query_tests;
