pub mod u001_database_explorer;
