mod question_bounds;
