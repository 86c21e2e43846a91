mod commands_fail_outside_a_repository;
mod init_repository_successfully;
