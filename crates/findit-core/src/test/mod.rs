// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use incrementing_id_provider::IncrementingIDProvider;
pub use mock_app_dependencies::MockAppDependencies;


pub mod mock_data {
    pub use super::images::{jpeg_with_exif_orientation, png};
    pub use super::mock_app_dependencies::{
        mock_account_id as account_id, mock_reference_date as reference_date,
    };
}
