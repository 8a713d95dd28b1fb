// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod line_items_csv_datasource;
        pub(crate) mod manifest_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod billable_weight_model;
        pub(crate) mod item_type_model;
        pub(crate) mod manifest_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod manifests_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod line_item;
        pub(crate) mod manifest;
        pub(crate) mod rate_table;
        pub(crate) mod statement;
        pub(crate) mod summary;
    }
    pub(crate) mod logic {
        pub(crate) mod line_pricer;
        pub(crate) mod slab;
        pub(crate) mod statement_builder;
        pub(crate) mod summarizer;
        mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod manifests_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod process_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod statement_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::line_item::*;
        pub use crate::domain::entities::manifest::*;
        pub use crate::domain::entities::rate_table::*;
        pub use crate::domain::entities::statement::*;
        pub use crate::domain::entities::summary::*;
    }

    pub mod engine {
        pub use crate::domain::logic::line_pricer::{
            blank_line_item, price_line_item, reprice_manifest, resequence_items,
        };
        pub use crate::domain::logic::slab::{
            price_parcel, SlabSplit, TIER1_CAP_KG, TIER2_CAP_KG,
        };
        pub use crate::domain::logic::statement_builder::build_statement;
        pub use crate::domain::logic::summarizer::summarize;
    }
}
