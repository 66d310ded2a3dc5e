mod title_normalizer_test;
