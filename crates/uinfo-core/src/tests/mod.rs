mod csv;
mod models;
