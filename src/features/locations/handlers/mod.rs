pub mod location_handler;

pub use location_handler::{
    __path_create_location, __path_get_location, __path_list_locations, create_location,
    get_location, list_locations,
};
