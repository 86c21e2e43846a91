mod shell_runs_scripted_session;
