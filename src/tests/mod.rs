mod formatting_tests;
