mod function_mapper;
mod properties;
