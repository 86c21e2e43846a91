mod add_files_to_index_successfully;
mod adding_a_non_existent_file_fails;
