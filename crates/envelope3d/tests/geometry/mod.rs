mod collection_broad_phase;
mod ground_loading;
mod intersection_properties;
mod shell_flat;
mod shell_mesh;
