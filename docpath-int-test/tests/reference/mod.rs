mod path_resolution_test;
